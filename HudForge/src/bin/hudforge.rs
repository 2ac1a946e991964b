fn main() -> anyhow::Result<()> {
    hudforge::cli::run_cli()
}
