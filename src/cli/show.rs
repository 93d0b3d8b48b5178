use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use pagewise::pagination::{page_rows, PageView, Paginator};
use pagewise::Config;

use super::input::load_lines;

/// Print one page of a file non-interactively
#[derive(Args)]
pub struct ShowCommand {
    /// File to paginate, or `-` for stdin
    pub file: PathBuf,

    /// Page to show (1-based). Out-of-range pages are clamped
    #[arg(short = 'p', long = "page", allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Lines per page (defaults to the configured page size)
    #[arg(short = 's', long = "page-size", allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

impl ShowCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let items = load_lines(&self.file).await?;

        let mut paginator = match self.page_size {
            Some(size) => Paginator::new(size),
            None => Paginator::from_config(config),
        };

        print!("{}", show_page(&items, &mut paginator, self.page));
        Ok(())
    }
}

/// Move to the requested page (clamped, page 1 when absent) and render it.
fn show_page(items: &[String], paginator: &mut Paginator, page: Option<i64>) -> String {
    let mut pager = paginator.bind(items);
    pager.go_to_page(page.unwrap_or(1));
    let view = pager.view();

    info!(page = view.page, total_pages = view.total_pages, "showing page");
    render_plain(&view)
}

/// Rows followed by the page indicator and range summary.
fn render_plain(view: &PageView<'_, String>) -> String {
    let mut out = String::new();
    for row in page_rows(view) {
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&format!(
        "-- Page {} of {} -- {}\n",
        view.page,
        view.total_pages.max(1),
        view.summary()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_last_page() {
        let items: Vec<String> = (1..=12).map(|n| format!("row {}", n)).collect();
        let mut paginator = Paginator::new(5);
        let mut pager = paginator.bind(&items);
        pager.go_to_page(10);

        let out = render_plain(&pager.view());
        assert_eq!(
            out,
            "   11  row 11\n   12  row 12\n-- Page 3 of 3 -- Showing 11 to 12 of 12 results\n"
        );
    }

    #[test]
    fn test_show_page_clamps_requested_page() {
        let items: Vec<String> = (1..=25).map(|n| format!("row {}", n)).collect();

        for requested in [Some(0), Some(-3), None] {
            let mut paginator = Paginator::new(10);
            let out = show_page(&items, &mut paginator, requested);
            assert_eq!(paginator.page(), 1);
            assert!(out.starts_with("    1  row 1\n"));
            assert!(out.ends_with("-- Page 1 of 3 -- Showing 1 to 10 of 25 results\n"));
        }

        let mut paginator = Paginator::new(10);
        show_page(&items, &mut paginator, Some(99));
        assert_eq!(paginator.page(), 3);
    }

    #[test]
    fn test_render_plain_empty() {
        let items: Vec<String> = Vec::new();
        let out = render_plain(&Paginator::default().view(&items));
        assert_eq!(out, "-- Page 1 of 1 -- Showing 0 to 0 of 0 results\n");
    }
}
