//! fileconv CLI - file format conversion tool

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use fileconv::{
    IconFormat, NodeOutput, NodeRegistry, RasterFormat, RasterOptions, Request, SvgToImageNode,
};

#[derive(Parser)]
#[command(name = "fileconv")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert SVG to raster images, images to icons, and PDF to text", long_about = None)]
struct Cli {
    /// Emit the structured result record as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an SVG file to PNG or JPEG with fixed dimensions
    Svg {
        /// Input SVG file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output image width in pixels
        #[arg(short = 'W', long)]
        width: u32,

        /// Output image height in pixels
        #[arg(short = 'H', long)]
        height: u32,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Output image format
        #[arg(long, value_enum, default_value = "png")]
        format: RasterArg,

        /// Internal supersampling factor (quality knob, output size is unchanged)
        #[arg(long, default_value = "2")]
        supersample: u32,
    },

    /// Generate ICO or ICNS icon files at all standard sizes
    Icon {
        /// Input image file (PNG recommended)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Icon container format
        #[arg(long, value_enum, default_value = "ico")]
        format: IconArg,
    },

    /// Extract plain text from a PDF, one block per page
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RasterArg {
    Png,
    Jpeg,
}

impl From<RasterArg> for RasterFormat {
    fn from(arg: RasterArg) -> Self {
        match arg {
            RasterArg::Png => RasterFormat::Png,
            RasterArg::Jpeg => RasterFormat::Jpeg,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IconArg {
    Ico,
    Icns,
}

impl From<IconArg> for IconFormat {
    fn from(arg: IconArg) -> Self {
        match arg {
            IconArg::Ico => IconFormat::Ico,
            IconArg::Icns => IconFormat::Icns,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut registry = NodeRegistry::with_defaults();

    let (request, input, text_output) = match cli.command {
        Commands::Svg {
            input,
            width,
            height,
            output,
            format,
            supersample,
        } => {
            let options = RasterOptions::new().with_supersample(supersample);
            registry.register(Arc::new(SvgToImageNode::with_options(options)));
            (
                Request::SvgToImage {
                    svg_path: input.clone(),
                    width,
                    height,
                    output_dir: output,
                    format: format.into(),
                },
                input,
                None,
            )
        }
        Commands::Icon {
            input,
            output,
            format,
        } => (
            Request::ImageToIcon {
                image_path: input.clone(),
                output_dir: output,
                format: format.into(),
            },
            input,
            None,
        ),
        Commands::Text { input, output } => (
            Request::PdfToText {
                pdf_path: input.clone(),
            },
            input,
            Some(output),
        ),
    };

    log::debug!("dispatching request: {:?}", request);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Converting {}", input.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let report = registry.run(&request);

    spinner.finish_and_clear();

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                return ExitCode::FAILURE;
            }
        }
        return if report.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match (report.output, report.error_message) {
        (Some(NodeOutput::File(path)), _) => {
            println!("{} {}", "Created".green().bold(), path.display());
            ExitCode::SUCCESS
        }
        (Some(NodeOutput::Files(paths)), _) => {
            println!("{} {} files", "Created".green().bold(), paths.len());
            for path in &paths {
                println!("  {}", path.display());
            }
            ExitCode::SUCCESS
        }
        (Some(NodeOutput::Pages(pages)), _) => {
            let body = pages.join("\n\n");
            match text_output.flatten() {
                Some(path) => {
                    if let Err(e) = fs::write(&path, body) {
                        eprintln!("{} {}", "Error:".red().bold(), e);
                        return ExitCode::FAILURE;
                    }
                    println!(
                        "{} {} pages to {}",
                        "Extracted".green().bold(),
                        pages.len(),
                        path.display()
                    );
                }
                None => println!("{}", body),
            }
            ExitCode::SUCCESS
        }
        (None, Some(message)) => {
            eprintln!("{} {}", "Error:".red().bold(), message);
            ExitCode::FAILURE
        }
        (None, None) => ExitCode::FAILURE,
    }
}
