// Printable HTML rendering.
// The sizing engine's output is injected as CSS so the browser's print dialog produces one page.

pub mod handlers;
pub mod html;

pub use html::render_html;
