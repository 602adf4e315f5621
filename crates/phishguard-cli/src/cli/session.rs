//! Line-oriented check loop: one URL per line, checked synchronously.

use phishguard_core::forest::Classifier;
use phishguard_core::predictor::AppContext;
use std::io::{self, BufRead, Write};

use super::display::{render_banner, render_cleared, render_input_error, render_verdict};

pub const PROMPT: &str = "Enter URL to Check: ";
const QUIT: &str = ":quit";
const CLEAR: &str = ":clear";

/// Run the loop until EOF or `:quit`. Returns how many URLs were classified.
pub fn run_session<C, R, W>(ctx: &AppContext<C>, mut input: R, out: &mut W) -> io::Result<usize>
where
    C: Classifier,
    R: BufRead,
    W: Write,
{
    render_banner(out, ctx.report())?;
    writeln!(out, "Type a URL and press Enter; {CLEAR} resets the screen, {QUIT} exits.")?;

    let mut checked = 0;
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let url = line.trim_end_matches(['\n', '\r']);

        match url.trim() {
            QUIT => break,
            CLEAR => {
                render_cleared(out, ctx.report())?;
                continue;
            }
            _ => {}
        }

        match ctx.check(url) {
            Ok(verdict) => {
                checked += 1;
                render_verdict(out, &verdict)?;
            }
            Err(err) => render_input_error(out, &err)?,
        }
    }
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishguard_core::dataset::Label;
    use phishguard_core::features::{FeatureVector, Signal, SignalRules};
    use phishguard_core::trainer::TrainingReport;

    /// Flags anything not served over https.
    struct HttpsOnly;

    impl Classifier for HttpsOnly {
        fn predict(&self, features: &FeatureVector) -> Label {
            if features.get(Signal::NotHttps) == 1.0 {
                Label::Phishing
            } else {
                Label::Benign
            }
        }
    }

    fn ctx() -> AppContext<HttpsOnly> {
        let report = TrainingReport {
            rows: 10,
            benign: 5,
            phishing: 5,
            train_size: 8,
            test_size: 2,
            correct: 1,
            accuracy: 0.5,
            fingerprint: None,
        };
        AppContext::new(HttpsOnly, SignalRules::default(), report)
    }

    fn run(input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let n = run_session(&ctx(), input.as_bytes(), &mut out).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn banner_shows_accuracy() {
        let (n, text) = run("");
        assert_eq!(n, 0);
        assert!(text.contains("Model Accuracy: 50.00%"));
    }

    #[test]
    fn checks_each_line() {
        let (n, text) = run("http://bit.ly/x\nhttps://example.com\n");
        assert_eq!(n, 2);
        assert!(text.contains("Phishing URL Detected!"));
        assert!(text.contains("🚨 URL uses a shortening service."));
        assert!(text.contains("This URL is Safe."));
        assert!(text.contains("No suspicious features detected."));
    }

    #[test]
    fn blank_line_warns_without_checking() {
        let (n, text) = run("\n   \n");
        assert_eq!(n, 0);
        assert_eq!(text.matches("Input Error: Please enter a URL!").count(), 2);
    }

    #[test]
    fn quit_stops_reading() {
        let (n, text) = run("http://a\n:quit\nhttp://b\n");
        assert_eq!(n, 1);
        assert_eq!(text.matches("Phishing URL Detected!").count(), 1);
    }

    #[test]
    fn clear_resets_screen() {
        let (n, text) = run("http://a\n:clear\n");
        assert_eq!(n, 1);
        assert_eq!(text.matches("Model Accuracy: 50.00%").count(), 2);
    }

    #[test]
    fn crlf_is_stripped() {
        let (_, text) = run("https://example.com\r\n");
        assert!(text.contains("This URL is Safe."));
    }
}
