fn main() {
    componentry::app::cli::run();
}
