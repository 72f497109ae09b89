use skiff_types::filters::{Args, parse_flag};

pub fn filters_command(filters: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", encode_filters(filters)?);
    Ok(())
}

fn encode_filters(filters: &[String]) -> Result<String, skiff_types::TypesError> {
    let args = filters
        .iter()
        .try_fold(Args::new(), |args, flag| parse_flag(flag, args))?;
    args.to_param()
}
