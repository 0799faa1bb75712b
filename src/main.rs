fn main() {
    aos_soa_bench::app::run();
}
