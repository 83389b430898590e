fn main() -> anyhow::Result<()> {
    web_explorer::cli::run()
}
