// Adapters layer: concrete renderers for formatted batches (text, json, csv).

pub mod output;
