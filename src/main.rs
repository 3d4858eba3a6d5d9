use jsonresponse::config::Config;
use jsonresponse::http::writer::ResponseWriter;
use jsonresponse::script::Script;
use tokio::io::AsyncWriteExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let script = Script::load(&cfg.script_path)?;
    let response = script.render();

    tracing::info!(
        script = %cfg.script_path.display(),
        status = response.status.as_u16(),
        "Response rendered"
    );

    let mut stdout = tokio::io::stdout();
    if cfg.body_only {
        stdout.write_all(&response.body).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    } else {
        ResponseWriter::new(&response).write_to(&mut stdout).await?;
    }

    Ok(())
}
