// Upload flow: one PDF in, one analysis report out. Nothing is kept between requests.

pub mod handlers;
pub mod pipeline;
