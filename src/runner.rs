use std::path::{Path, PathBuf};
use std::time::Duration;

use dirprobe::config::CrawlConfig;
use dirprobe::crawl::Crawler;
use dirprobe::output::write_findings;
use dirprobe::{http_client, target, wordlist};

use crate::cli::Cli;

fn print_ascii_logo() {
    println!(
        r#"
         _ _                     _
      __| (_)_ __ _ __  _ __ ___ | |__   ___
     / _` | | '__| '_ \| '__/ _ \| '_ \ / _ \
    | (_| | | |  | |_) | | | (_) | |_) |  __/
     \__,_|_|_|  | .__/|_|  \___/|_.__/ \___|
                 |_|
               Hidden Directory Scanner v0.1.0
    "#
    );
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. Keep external crates
    // (reqwest/hyper) at INFO so per-probe connection noise stays out of
    // the CLI even in debug mode.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!(
        "dirprobe={level},reqwest=info,hyper=info,h2=info",
        level = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    let base = target::normalize_base_url(&cli.url)?;

    // Wordlist read failure is fatal and happens before any probing.
    let words = match cli.wordlist.as_deref() {
        Some(path) => {
            let words = wordlist::load_wordlist(Path::new(path))?;
            println!("[*] Loaded {} entries from wordlist", words.len());
            words
        }
        None => wordlist::default_wordlist(),
    };

    let config = CrawlConfig {
        threads: cli.threads as usize,
        delay: Duration::from_secs_f64(cli.delay.max(0.0)),
        timeout_secs: cli.timeout,
    };

    print_ascii_logo();
    println!("[*] Starting crawl on {}", base);
    println!(
        "[*] Using {} threads with {}s delay between requests",
        config.threads, cli.delay
    );
    if let Some(ref output) = cli.output {
        println!("[*] Results will be saved to {}", output);
    }

    tracing::info!(
        url = %base,
        threads = config.threads,
        delay_secs = cli.delay,
        timeout = config.timeout_secs,
        "starting crawl"
    );

    let client = http_client::create_probe_client(config.timeout_secs)?;
    let crawler = Crawler::new(client, config);
    let findings = crawler.run(&base, &words).await;

    println!("\n[*] Crawl complete!");
    if findings.is_empty() {
        println!("[-] No directories found");
        return Ok(());
    }

    println!("[+] Found directories:");
    for finding in &findings {
        println!("  - {}", finding.url);
    }

    // A failed write is reported but never fails the crawl; the findings
    // were already printed above.
    if let Some(output) = cli.output {
        let path = PathBuf::from(output);
        match write_findings(&path, &findings) {
            Ok(()) => println!("\n[+] Results saved to {}", path.display()),
            Err(e) => eprintln!("\n[-] Error saving results: {}", e),
        }
    }

    Ok(())
}
