use metascout::config::Config;
use metascout::error::Result;
use metascout::{best_match, Metacritic};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    let metacritic = Metacritic::with_client(config.http_client.clone(), &config.settings)?;
    let args = &config.args;

    // Search errors stay fatal here, unlike `search_best_match`.
    let mut games = metacritic.search(&args.title, args.platform).await?;
    if args.best_match {
        games = best_match(&args.title, &games).cloned().into_iter().collect();
    }

    if args.json {
        if args.best_match {
            println!("{}", serde_json::to_string_pretty(&games.first())?);
        } else {
            println!("{}", serde_json::to_string_pretty(&games)?);
        }
    } else {
        for game in &games {
            println!("{}", game.to_tsv());
        }
    }

    info!("Done, {} result(s)", games.len());
    Ok(())
}
