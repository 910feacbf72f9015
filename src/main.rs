use anyhow::Result;
use sourcewell_scraper::utils::logging;
use sourcewell_scraper::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init_with_file(config.verbose_logging, &config.output_log_file)?;

    // 初始化并运行应用
    let _stats = App::initialize(config).await?.run().await?;

    Ok(())
}
