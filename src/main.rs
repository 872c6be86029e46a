use std::time::Instant;
use anyhow::{Context, Result};
use log::{debug, info};
use clap::Parser;

use fluent_find::cli::Cli;

fn main() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    cli.validate().context("命令行参数无效")?;

    info!("开始运行 fluent-find");
    let start_time = Instant::now();

    // 为每个指定的路径执行搜索
    for path in &cli.paths {
        debug!("在路径中搜索: {}", path);

        let finder = cli
            .build_finder(path)
            .with_context(|| format!("创建过滤链失败: {}", path))?;
        debug!("过滤链: {:?}", finder.filter_descriptions());

        // 打印结果
        for entry in finder.results() {
            println!("{}", entry);
        }
    }

    let elapsed = start_time.elapsed();
    info!("搜索完成，耗时 {:.2?}", elapsed);

    Ok(())
}
