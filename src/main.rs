fn main() {
    bytereel_bin::main()
}
