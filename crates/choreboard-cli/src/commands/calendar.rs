use choreboard_core::{render, MonthGrid};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let grid = MonthGrid::current();
    print!("{}", render::month_grid(&grid));
    Ok(())
}
