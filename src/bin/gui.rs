fn main() {
    let command = mandelzoom::RunGuiCommand::new();

    command.execute();
}
