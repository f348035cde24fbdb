fn main() -> anyhow::Result<()> {
    brrtcors::cli::run_cli()
}
