use howlong::error::Result;
use howlong::greeting;

use crate::WeddingArgs;

pub fn run(args: WeddingArgs) -> Result<()> {
    println!("{}", greeting::wedding(&args.name));
    Ok(())
}
