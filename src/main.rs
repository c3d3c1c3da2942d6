fn main() {
    goldcase::cli::run();
}
