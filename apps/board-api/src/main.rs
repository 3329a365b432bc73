use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = board_api::Args::parse();

	board_api::run(args).await
}
