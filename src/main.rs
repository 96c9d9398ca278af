use luna_chess::uci::uci_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
