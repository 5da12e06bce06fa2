mod error;
mod health_check;
mod reviews;
mod site;
mod subscribers;

pub use error::*;
pub use health_check::*;
pub use reviews::*;
pub use site::*;
pub use subscribers::*;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
