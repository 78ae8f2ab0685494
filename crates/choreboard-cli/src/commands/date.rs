use choreboard_core::calendar;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", calendar::today_long_date());
    Ok(())
}
