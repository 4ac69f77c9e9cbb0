use daycheck_core::TimeOfDay;

pub fn run(hour: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let time_of_day = hour.map_or_else(TimeOfDay::now, TimeOfDay::from_hour);
    println!("{}! ({})", time_of_day.greeting(), time_of_day);
    Ok(())
}
