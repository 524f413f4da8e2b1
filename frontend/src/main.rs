fn main() {
    faceattend_frontend::run();
}
