use ferrous_mdns_domain::{Response, ServiceProtocol};
use ferrous_mdns_infrastructure::mdns::DecodeSummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub records: usize,
    pub skipped: usize,
    pub responses: Vec<ResponseView>,
}

#[derive(Debug, Serialize)]
pub struct ResponseView {
    pub instance: String,
    pub complete: bool,
    pub goodbye: bool,
    pub last_update_millis: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<String>,
    pub service: Option<ServiceView>,
    pub txt: Vec<String>,
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServiceView {
    pub name: Option<String>,
    pub protocol: Option<&'static str>,
    pub host: String,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

impl DecodeReport {
    pub fn new(summary: &DecodeSummary, responses: &[Response]) -> Self {
        Self {
            records: summary.records,
            skipped: summary.skipped,
            responses: responses.iter().map(ResponseView::from).collect(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{} records decoded, {} skipped, {} instances\n",
            self.records,
            self.skipped,
            self.responses.len()
        );
        for response in &self.responses {
            response.write_text(&mut out);
        }
        out
    }
}

impl ResponseView {
    fn write_text(&self, out: &mut String) {
        let state = match (self.complete, self.goodbye) {
            (_, true) => "goodbye",
            (true, false) => "complete",
            (false, false) => "incomplete",
        };
        out.push_str(&format!("\n{} [{}]\n", self.instance, state));
        if !self.subtypes.is_empty() {
            out.push_str(&format!("  subtypes: {}\n", self.subtypes.join(", ")));
        }
        if let Some(service) = &self.service {
            out.push_str(&format!(
                "  service:  {}:{} (priority {}, weight {})\n",
                service.host, service.port, service.priority, service.weight
            ));
        }
        if let Some(ipv4) = &self.ipv4 {
            out.push_str(&format!("  ipv4:     {}\n", ipv4));
        }
        if let Some(ipv6) = &self.ipv6 {
            out.push_str(&format!("  ipv6:     {}\n", ipv6));
        }
        for entry in &self.txt {
            out.push_str(&format!("  txt:      {}\n", entry));
        }
    }
}

impl From<&Response> for ResponseView {
    fn from(response: &Response) -> Self {
        let service = response.service_record().map(|srv| ServiceView {
            name: srv.service_name().map(str::to_string),
            protocol: srv.service_protocol().map(|protocol| match protocol {
                ServiceProtocol::Tcp => "tcp",
                ServiceProtocol::Udp => "udp",
            }),
            host: srv.host.to_string(),
            port: srv.port,
            priority: srv.priority,
            weight: srv.weight,
        });

        Self {
            instance: response.instance_name().to_string(),
            complete: response.is_complete(),
            goodbye: response.is_goodbye(),
            last_update_millis: response.last_update_millis(),
            subtypes: response
                .subtypes()
                .into_iter()
                .map(str::to_string)
                .collect(),
            service,
            txt: response
                .text_record()
                .map(|txt| txt.strings())
                .unwrap_or_default(),
            ipv4: response
                .inet4_address_record()
                .and_then(|record| record.inet4_address())
                .map(|addr| addr.to_string()),
            ipv6: response
                .inet6_address_record()
                .and_then(|record| record.inet6_address())
                .map(|addr| addr.to_string()),
        }
    }
}
