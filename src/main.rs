fn main() -> miette::Result<()> {
    dotarr::cli::run()
}
