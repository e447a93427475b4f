fn main() {
    mvnw_gen::app::cli::run();
}
