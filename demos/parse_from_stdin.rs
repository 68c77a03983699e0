use lenient_uri::Uri;
use std::io;

fn main() {
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match Uri::parse(&line) {
            Ok(uri) => {
                println!("{uri:#?}");
                for (name, value) in uri.query().params() {
                    println!("  {name} = {value}");
                }
            }
            Err(e) => println!("Error: {e}"),
        };
    }
}
