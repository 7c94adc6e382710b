use clap::{Parser, Subcommand};
use docpress::types::Layout;
use docpress::{config, discover, output, pdf, site};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docpress")]
#[command(about = "Convert Markdown documentation archives to PDF and HTML")]
#[command(long_about = "\
Convert Markdown documentation archives to PDF and HTML

The input is a directory tree of Markdown files grouped by framework:

  <base>/
  └── markdown/
      ├── swift/
      │   ├── overview.md
      │   └── stdlib/array.md        # arbitrary nesting
      └── swiftui/
          └── views/text.md

Outputs:

  <base>/pdf/<framework>_documentation.pdf    # one combined PDF per framework
  <base>/html/<framework>/**/*.html           # mirrored page tree
  <base>/html/<framework>/index.html          # per-framework index with search
  <base>/html/index.html                      # global landing page

The pdf command shells out to pandoc (xelatex engine); the html command
renders everything in-process. Pages are ordered root-level first, then by
relative path, case-insensitively.")]
#[command(version)]
struct Cli {
    /// Base directory containing the markdown/ input tree
    #[arg(long, default_value = ".", global = true)]
    base_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Combine each framework's pages into a single PDF via pandoc
    Pdf {
        /// Framework(s) to convert
        #[arg(required = true)]
        frameworks: Vec<String>,

        /// Maximum number of pages to include (first N in order)
        #[arg(long)]
        max_pages: Option<usize>,

        /// Author recorded in the PDF title block
        #[arg(long, default_value = "Apple Inc.")]
        author: String,
    },
    /// Render frameworks into a browsable static HTML site
    Html {
        /// Framework(s) to render (default: all discovered)
        frameworks: Vec<String>,
    },
    /// List discovered frameworks with their page counts
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let layout = Layout::new(&cli.base_dir);

    match cli.command {
        Command::Pdf {
            frameworks,
            max_pages,
            author,
        } => {
            let opts = pdf::PdfOptions {
                max_pages,
                author,
                ..Default::default()
            };
            if !pdf::typesetter_available(&opts.program) {
                println!("Error: pandoc is not installed");
                println!();
                println!("To install pandoc:");
                println!("  {}", pdf::install_hint());
                return Err("pandoc is not installed".into());
            }
            for framework in &frameworks {
                println!();
                println!("Converting {framework} to PDF...");
                match pdf::convert_framework(&layout, framework, &opts, ask) {
                    Ok(outcome) => output::print_pdf_outcome(framework, &outcome),
                    Err(err) => println!("Error converting {framework}: {err}"),
                }
            }
            println!();
            println!("PDFs saved to {}", layout.pdf_dir.display());
        }
        Command::Html { frameworks } => {
            let frameworks = if frameworks.is_empty() {
                discover::list_frameworks(&layout.markdown_dir)?
            } else {
                frameworks
            };
            if frameworks.is_empty() {
                println!(
                    "No frameworks found under {}",
                    layout.markdown_dir.display()
                );
                return Ok(());
            }
            let summary = site::build_site(&layout, &frameworks)?;
            output::print_site_summary(&summary);
        }
        Command::List => {
            let names = discover::list_frameworks(&layout.markdown_dir)?;
            let mut listings = Vec::new();
            for name in names {
                let pages = discover::discover_pages(&layout.markdown_dir, &name)?.len();
                let config = config::lookup(&name);
                listings.push(output::FrameworkListing {
                    name,
                    config,
                    pages,
                });
            }
            output::print_framework_list(&listings);
        }
    }

    Ok(())
}

/// Interactive y/N confirmation on stdin. Anything but `y` declines.
fn ask(prompt: &str) -> bool {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    line.trim().eq_ignore_ascii_case("y")
}
