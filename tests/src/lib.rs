#[cfg(test)]
mod presenter;
#[cfg(test)]
mod remote;
