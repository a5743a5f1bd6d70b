use drawps::read_draw_file;

fn main() {
    env_logger::init();

    let commands = read_draw_file("drawps/examples/sample_draw.ps").expect("read draw file");
    for command in &commands {
        println!("{:?}", command.tokens());
    }
    println!("{} commands", commands.len());
}
