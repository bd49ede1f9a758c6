//! Local JSON API over the optimizer. One request per connection, handled
//! sequentially; each request is a short CPU-bound search.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

pub mod api;
pub mod routes;

/// Largest request body accepted.
const MAX_BODY_BYTES: usize = 1 << 20;
/// A client that stalls longer than this mid-request is dropped.
const READ_TIMEOUT: Duration = Duration::from_secs(10);

pub fn run_server(bind_addr: &str, default_min_points: u32) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    tracing::info!(%bind_addr, default_min_points, "fairway server listening");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream, default_min_points) {
                    tracing::warn!(%err, "request error");
                }
            }
            Err(err) => tracing::warn!(%err, "connection failed"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream, default_min_points: u32) -> std::io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line)? == 0 {
        return Ok(());
    }
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET").to_string();
    let path = request_parts.next().unwrap_or("/").to_string();

    let mut content_length: Result<usize, String> = Ok(0);
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = parse_content_length(value);
            }
        }
    }

    let response = match content_length {
        Err(raw) => {
            routes::error_response(400, "Bad Request", &format!("Invalid Content-Length '{raw}'"))
        }
        Ok(length) if length > MAX_BODY_BYTES => {
            routes::error_response(413, "Payload Too Large", "Request body too large")
        }
        Ok(length) => {
            let mut body = vec![0_u8; length];
            reader.read_exact(&mut body)?;
            let body = String::from_utf8_lossy(&body);
            routes::route_request(&method, &path, &body, default_min_points)
        }
    };

    tracing::info!(%method, %path, status = response.status_code, "handled request");
    stream.write_all(response.to_http_string().as_bytes())?;
    stream.flush()?;
    Ok(())
}

fn parse_content_length(value: &str) -> Result<usize, String> {
    let value = value.trim();
    value.parse().map_err(|_| value.to_string())
}
