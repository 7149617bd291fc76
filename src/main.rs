use clap::{Arg, Command};
use shellcurl::url::with_query_param;
use shellcurl::{ParsedRequest, parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RequestPart {
    Method,
    Url,
    Headers,
    Body,
}

fn print_request(request: &ParsedRequest, part: Option<RequestPart>) {
    match part {
        Some(RequestPart::Method) => println!("{}", request.method),
        Some(RequestPart::Url) => println!("{}", request.url),
        Some(RequestPart::Headers) => {
            println!("{}", serde_json::to_string_pretty(&request.headers).unwrap())
        }
        Some(RequestPart::Body) => println!("{}", request.body.clone().unwrap_or_default()),
        None => println!("{}", serde_json::to_string_pretty(request).unwrap()),
    }
}

fn main() {
    let matches = Command::new("shellcurl")
        .version("0.1.0")
        .about("A CLI tool to parse pasted curl commands and inspect URLs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parses a curl command into {method, url, headers, body}")
                .arg(
                    Arg::new("command")
                        .help("The input curl command string")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Print only one part of the request (method, url, headers, body)")
                        .required(false)
                        .value_parser(clap::value_parser!(RequestPart)),
                ),
        )
        .subcommand(
            Command::new("url")
                .about("Splits a URL, optionally adding or replacing a query parameter")
                .arg(
                    Arg::new("url")
                        .help("The URL to inspect")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("param")
                        .short('p')
                        .long("param")
                        .value_name("KEY=VALUE")
                        .help("Add this query parameter, replacing an existing key")
                        .required(false),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", sub_matches)) => {
            let command = sub_matches.get_one::<String>("command").unwrap();
            let part = sub_matches.get_one::<RequestPart>("part").copied();

            match parse(command) {
                Ok(request) => print_request(&request, part),
                Err(e) => {
                    eprintln!("error [{}]: {}", e.code(), e);
                    std::process::exit(2);
                }
            }
        }
        Some(("url", sub_matches)) => {
            let url = sub_matches.get_one::<String>("url").unwrap();
            match sub_matches.get_one::<String>("param") {
                Some(param) => {
                    let (key, value) = param.split_once('=').unwrap_or((param.as_str(), ""));
                    match with_query_param(url, key, value) {
                        Ok(rebuilt) => println!("{rebuilt}"),
                        Err(e) => {
                            eprintln!("error: {e}");
                            std::process::exit(2);
                        }
                    }
                }
                None => {
                    let mut input = url.as_str();
                    match shellcurl::url::parse_url(&mut input) {
                        Ok(parts) => println!("{parts:#?}"),
                        Err(e) => {
                            eprintln!("error: {e:?}");
                            std::process::exit(2);
                        }
                    }
                }
            }
        }
        _ => {
            Command::new("shellcurl").print_help().unwrap();
            println!();
        }
    }
}
