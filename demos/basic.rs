use api_request::request;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(url), Some(token)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: basic <url> <access-token> [verb]");
    };
    let verb = args.next().unwrap_or_else(|| api_request::DEFAULT_VERB.to_owned());

    let response = request(&url, &token, &verb).await?;

    println!("{} {}", response.status(), response.text().await?);
    Ok(())
}
