use hullres_core::prelude::*;

pub fn execute() -> anyhow::Result<()> {
    for method in SurfaceAreaMethod::ALL {
        println!("{:<10} {}", method.tag(), method.description());
    }
    Ok(())
}
