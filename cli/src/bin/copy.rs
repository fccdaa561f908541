fn main() {
    cpmv_cli::run();
}
