use pushkind_jobmatch::crawlers::careers::CareersPageCrawler;
use pushkind_jobmatch::models::config::load_config;
use pushkind_jobmatch::notifier::SmtpNotifier;
use pushkind_jobmatch::processing::run_pipeline;
use pushkind_jobmatch::repository::S3Repository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let notifier = match SmtpNotifier::new(&config.mail, &config.smtp) {
        Ok(notifier) => notifier,
        Err(e) => {
            log::error!("Failed to set up mail transport: {e}");
            std::process::exit(1);
        }
    };

    let crawler = match CareersPageCrawler::new(&config.crawl) {
        Ok(crawler) => crawler,
        Err(e) => {
            log::error!("Failed to set up HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let repository = S3Repository::from_config(&config.storage).await;

    if let Err(e) = run_pipeline(
        &config.storage.key,
        &config.crawl,
        &repository,
        &crawler,
        &notifier,
    )
    .await
    {
        log::error!("Job matching run failed: {e}");
        std::process::exit(1);
    }
}
