pub mod errors;
pub mod db;
pub mod specialty;

#[cfg(test)]
mod tests;
