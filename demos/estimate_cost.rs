use signalbridge::{MessageEncoding, calculate_segments, estimate_cost};

fn main() {
    let message = std::env::var("SIGNALBRIDGE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the signalbridge example.".to_owned());
    let segment_price = std::env::var("SIGNALBRIDGE_SEGMENT_PRICE")
        .ok()
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(32.0);

    println!(
        "encoding: {}, segments: {}, estimated cost: {:.2}",
        MessageEncoding::of(&message),
        calculate_segments(&message),
        estimate_cost(&message, segment_price)
    );
}
