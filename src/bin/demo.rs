use shellcurl::parse;

fn main() {
    let curl_command = "curl 'http://example.com' -H 'Accept: application/json'";
    let result = parse(curl_command);
    println!("{:?}", result);
}
