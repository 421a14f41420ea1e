use spanmark::parser::text_to_spans;
use spanmark::translator;

use std::io::{self, Read};
use std::process;
use structopt::StructOpt;

fn read() -> io::Result<String> {
    let mut content = String::new();
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    handle.read_to_string(&mut content)?;
    Ok(content)
}

// Blank lines separate paragraphs; lines inside one are joined by a space.
fn paragraphs(content: &str) -> Vec<String> {
    content
        .split("\n\n")
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

#[derive(Debug, StructOpt)]
#[structopt(about = "Converts inline markdown from stdin to HTML")]
struct Opt {
    /// Dump the parsed spans of every paragraph to stderr
    #[structopt(long = "debug")]
    pub debug: bool,

    /// Print spans instead of HTML
    #[structopt(long = "spans")]
    pub spans: bool,

    /// Element wrapping each paragraph
    #[structopt(long = "wrap", default_value = "p")]
    pub wrap: String,
}

fn run(opt: &Opt) -> Result<(), Box<dyn std::error::Error>> {
    let content = read()?;
    for paragraph in paragraphs(&content) {
        if opt.debug || opt.spans {
            let spans = text_to_spans(&paragraph)?;
            if opt.debug {
                eprintln!(">>> spans = {:?}", &spans);
            }
            if opt.spans {
                for span in &spans {
                    println!("{}", span);
                }
                continue;
            }
        }
        let html = translator::text_to_parent(&paragraph, &opt.wrap)?.to_html()?;
        println!("{}", html);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    log::debug!("opt = {:?}", &opt);
    if let Err(err) = run(&opt) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
