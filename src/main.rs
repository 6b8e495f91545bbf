fn main() {
    verstamp::app::startup::startup();
}
