fn main() -> anyhow::Result<()> {
    unit_converter::cli::run()
}
