use super::output::DecodeReport;
use super::{Input, OutputFormat};
use anyhow::Context;
use ferrous_mdns_domain::Config;
use ferrous_mdns_infrastructure::mdns::{Datagram, ResponseDecoder, SystemClock};
use std::sync::Arc;
use tracing::{debug, error};

pub fn run(config: &Config, input: &Input, format: OutputFormat) -> anyhow::Result<()> {
    let data = input.read()?;
    if data.len() > config.decoder.max_packet_size {
        anyhow::bail!(
            "Datagram of {} bytes exceeds max_packet_size {}",
            data.len(),
            config.decoder.max_packet_size
        );
    }

    let decoder = ResponseDecoder::from_config(Arc::new(SystemClock), &config.decoder);
    debug!(
        bytes = data.len(),
        service_type = ?config.decoder.service_type,
        "Decoding datagram"
    );

    let mut responses = Vec::new();
    let summary = decoder
        .decode(&Datagram::new(data, None), &mut responses)
        .map_err(|e| {
            error!(error = %e, status = e.status_code(), "Failed to decode datagram");
            e
        })
        .context("Failed to decode datagram")?;

    let report = DecodeReport::new(&summary, &responses);
    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }
    Ok(())
}
