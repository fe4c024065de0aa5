pub mod views;

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
