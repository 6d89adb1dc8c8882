fn main() -> eframe::Result<()> {
    regform::app::run()
}
