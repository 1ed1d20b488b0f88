use orders_to_struct::logging::EventLog;
use orders_to_struct::OrderTranscoder;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // Anything past the first argument is ignored
    let Some(path) = args.get(1) else {
        let program = args.first().map(String::as_str).unwrap_or("orders-to-struct");
        println!("Usage: {} ORDER_FILE", program);
        std::process::exit(-1);
    };

    let stdout = io::stdout();
    let mut transcoder =
        OrderTranscoder::new(BufWriter::new(stdout.lock())).with_log(EventLog::from_env());

    let result = transcoder.transcode_file(Path::new(path));

    for warning in transcoder.warnings() {
        eprintln!("warning: {}", warning);
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
