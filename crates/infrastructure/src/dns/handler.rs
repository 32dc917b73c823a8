use super::forwarder::UdpForwarder;
use arc_swap::ArcSwap;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record, RecordType};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use warden_dns_application::use_cases::EvaluateQueryUseCase;
use warden_dns_domain::{normalize_domain, BlockingMode, BlockingPlan, QueryRecord};

/// What the server loop does with one datagram: send the reply (if any),
/// then hand each record to the telemetry sink.
pub struct QueryOutcome {
    pub reply: Option<Vec<u8>>,
    pub records: Vec<QueryRecord>,
}

impl QueryOutcome {
    fn dropped() -> Self {
        Self {
            reply: None,
            records: Vec::new(),
        }
    }
}

/// Per-query state machine: decode, identify the client, evaluate policy,
/// synthesize a block response or forward upstream, encode.
///
/// The blocking plan is shared with the control plane; a swap there takes
/// effect on the next query.
pub struct QueryHandler {
    evaluate: Arc<EvaluateQueryUseCase>,
    forwarder: UdpForwarder,
    blocking: Arc<ArcSwap<BlockingPlan>>,
}

impl QueryHandler {
    pub fn new(
        evaluate: Arc<EvaluateQueryUseCase>,
        forwarder: UdpForwarder,
        blocking: Arc<ArcSwap<BlockingPlan>>,
    ) -> Self {
        Self {
            evaluate,
            forwarder,
            blocking,
        }
    }

    pub async fn handle(&self, packet: &[u8], client: IpAddr) -> QueryOutcome {
        let request = match Message::from_vec(packet) {
            Ok(message) => message,
            Err(e) => {
                // Undecodable datagrams get no reply at all.
                debug!(client = %client, error = %e, "Dropping undecodable packet");
                return QueryOutcome::dropped();
            }
        };

        // One plan per query; a concurrent swap affects later queries only.
        let plan = **self.blocking.load();

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired());
        response.add_queries(request.queries().to_vec());

        let mut records = Vec::new();

        for query in request.queries() {
            let name = normalize_domain(&query.name().to_utf8());
            let verdict = self.evaluate.execute(&name, client).await;

            if verdict.blocked {
                response.set_authoritative(true);
                match plan.mode {
                    BlockingMode::Redirect => {
                        self.answer_a(&mut response, query, plan.block_page_ip, 60);
                    }
                    BlockingMode::Null => {
                        self.answer_a(&mut response, query, Ipv4Addr::UNSPECIFIED, 0);
                    }
                    BlockingMode::Nxdomain => {
                        response.set_response_code(ResponseCode::NXDomain);
                    }
                }
                info!(domain = %name, client = %client, mode = ?plan.mode, "Query blocked");
                records.push(QueryRecord::new(name, client.to_string(), true));
                // A block ends processing of the whole message; remaining
                // questions go unanswered in this reply.
                break;
            }

            match self.forwarder.forward(packet).await {
                Ok(upstream) => {
                    response.add_answers(upstream.answers().iter().cloned());
                }
                Err(e) => {
                    // The client still gets a reply, just with no records.
                    warn!(domain = %name, upstream = %self.forwarder.upstream(), error = %e, "Forward failed; replying with empty answer");
                }
            }
            debug!(domain = %name, client = %client, "Query forwarded");
            records.push(QueryRecord::new(name, client.to_string(), false));
        }

        let reply = match response.to_vec() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, "Failed to encode reply");
                None
            }
        };

        QueryOutcome { reply, records }
    }

    fn answer_a(
        &self,
        response: &mut Message,
        query: &hickory_proto::op::Query,
        ip: Ipv4Addr,
        ttl: u32,
    ) {
        if matches!(query.query_type(), RecordType::A | RecordType::ANY) {
            response.add_answer(Record::from_rdata(
                query.name().clone(),
                ttl,
                RData::A(A(ip)),
            ));
        }
    }
}
