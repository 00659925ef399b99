use crate::models::CallContext;

/// System prompt pinning the model to schema-only output
pub const SYSTEM_PROMPT: &str = "You are a precise data extraction engine. Output strictly valid \
    JSON matching the provided schema. Do not include markdown formatting or explanations.";

/// Product baseline the analysis is graded against (January 2026)
pub const KNOWLEDGE_BASE: &str = r#"
1. OBSERVABILITY - INFRASTRUCTURE & CLOUD
- Infrastructure Monitoring: Monitor hosts & cloud resources.
- Network Monitoring: Network flows, topology, NPM.
- Container Monitoring: Kubernetes & containers.
- Kubernetes Autoscaling: Rightsize K8s resources.
- Serverless: Observe serverless apps end-to-end.
- Cloud Cost Management: FinOps, correlate spend.
- Cloudcraft: Visualize architectures.

2. OBSERVABILITY - APPLICATIONS & SERVICES
- APM: Trace and optimize app performance.
- Universal Service Monitoring: eBPF discovery without code changes.
- Software Catalog: Service ownership & metadata.
- Database Monitoring: Query analytics, explain plans.
- Continuous Profiler: Optimize code CPU/memory.
- Error Tracking: Group and prioritize errors.
- LLM Observability: Monitor LLM app quality & cost.
- Data Streams Monitoring: Event-driven pipeline latency.
- Quality Monitoring: Data freshness, schema changes.

3. OBSERVABILITY - LOGS & DATA
- Log Management: Search, analyze, index, "Logging without Limits".
- Observability Pipelines: Process/route telemetry, sensitive data reduction.
- CloudPrem: BYOC log storage.
- Sensitive Data Scanner: PII detection.
- Audit Trail: Track changes/governance.

4. DIGITAL EXPERIENCE
- Browser RUM: Real User Monitoring, Web Vitals.
- Mobile RUM: Mobile app experience.
- Session Replay: Debug UX visually.
- Synthetic Monitoring: API & Browser tests.
- Product Analytics: Funnels, cohorts.

5. SECURITY
- Cloud Security: Posture (CSPM), Workload Protection (CWP).
- App & API Protection: WAF-like threat detection.
- Code Security: SAST, SCA, IAST, Secret Scanning.
- Cloud SIEM: Log-based detections.

6. SOFTWARE DELIVERY & SERVICE MANAGEMENT
- CI Visibility: Pipeline analytics.
- Test Optimization: Flaky tests.
- DORA Metrics: Delivery performance.
- Service Level Objectives (SLOs): Error budgets.
- Incident Response: Coordination.

7. AI & PLATFORM
- Watchdog: Automated anomaly detection (AI).
- Bits AI: Agentic assistance.
- Teams, Dashboards, Notebooks.

REACTION BASELINE (SENTIMENT CUES):
- Positive: "single pane", "correlate", "reduce MTTR", "OpenTelemetry", "service map", "user journey", "replay", "CNAPP", "shift-left".
- Concerns/Objections: "agent overhead", "ingestion volume", "cost", "retention", "privacy/PII", "sampling", "false positives", "alert fatigue".
"#;

/// Build the user prompt for one analysis run
pub fn build_analysis_prompt(transcript: &str, context: Option<&CallContext>) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an expert Datadog Sales Coach and Product Analyst.\n\
         Your task is to analyze a sales demo transcript using the strictly defined \
         \"Datadog Product Baseline (2026)\" provided below.\n\n",
    );

    prompt.push_str("*** START KNOWLEDGE BASE ***\n");
    prompt.push_str(KNOWLEDGE_BASE);
    prompt.push_str("*** END KNOWLEDGE BASE ***\n\n");

    prompt.push_str("INSTRUCTIONS:\n");
    prompt.push_str("1. ANALYZE the transcript against the Knowledge Base.\n");
    prompt.push_str("2. IDENTIFY specific products, features, and pain points discussed.\n");
    prompt.push_str(
        "3. CLASSIFY sentiment using the \"Reaction Baseline\" cues (e.g. \"cost\" is an \
         objection, \"single pane\" is positive).\n",
    );
    prompt.push_str("4. MAP findings to the following schema categories strictly:\n");
    prompt.push_str(
        "   - 'Monitoring': Maps to Infra, Network, APM, RUM, Synthetics, Database, Serverless.\n",
    );
    prompt.push_str("   - 'Data': Maps to Logs, Pipelines, Metrics, Sensitive Data.\n");
    prompt.push_str("   - 'Security': Maps to Cloud Security, App Sec, SIEM.\n");
    prompt.push_str(
        "   - 'Workflow': Maps to Software Delivery (CI/CD), Service Management, Incident \
         Response.\n",
    );
    prompt.push_str("   - 'Intelligence': Maps to Watchdog, Bits AI, AI Integrations.\n\n");

    prompt.push_str("CONSISTENCY RULES:\n");
    prompt.push_str(
        "- If the prospect mentions \"alerts\" or \"noise\", map to \"Alert Fatigue\" pain \
         point.\n",
    );
    prompt.push_str(
        "- If the prospect mentions \"black box\" or \"cant see\", map to \"Infrastructure \
         Visibility\".\n",
    );
    prompt.push_str(
        "- If the prospect mentions \"price\", \"bill\", or \"finance\", map to \"Cost \
         Management\".\n\n",
    );

    if let Some(context) = context {
        push_call_details(&mut prompt, context);
    }

    prompt.push_str("TRANSCRIPT TO ANALYZE:\n");
    prompt.push_str(&format!("\"{transcript}\"\n"));

    prompt
}

fn push_call_details(prompt: &mut String, context: &CallContext) {
    prompt.push_str("CALL DETAILS (confirmed by the seller):\n");
    if !context.metadata.title.is_empty() {
        prompt.push_str(&format!("- Title: {}\n", context.metadata.title));
    }
    if !context.metadata.customer_name.is_empty() {
        prompt.push_str(&format!("- Customer: {}\n", context.metadata.customer_name));
    }
    if let Some(date) = &context.metadata.date {
        prompt.push_str(&format!("- Date: {date}\n"));
    }
    if let Some(duration) = &context.metadata.duration {
        prompt.push_str(&format!("- Duration: {duration}\n"));
    }
    for participant in &context.participants {
        let title = participant
            .title
            .as_deref()
            .map(|t| format!(", {t}"))
            .unwrap_or_default();
        let decision_maker = if participant.is_decision_maker {
            ", decision maker"
        } else {
            ""
        };
        prompt.push_str(&format!(
            "- Participant: {} ({:?}{}{})\n",
            participant.name, participant.role, title, decision_maker
        ));
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CallMetadata, Participant, Role};

    #[test]
    fn test_prompt_contains_knowledge_base_and_transcript() {
        let prompt = build_analysis_prompt("SE: welcome to the demo", None);
        assert!(prompt.contains("*** START KNOWLEDGE BASE ***"));
        assert!(prompt.contains("Logging without Limits"));
        assert!(prompt.contains("SE: welcome to the demo"));
        assert!(!prompt.contains("CALL DETAILS"));
    }

    #[test]
    fn test_prompt_includes_confirmed_context() {
        let context = CallContext {
            metadata: CallMetadata {
                title: "Datadog <> Acme Corp - Demo".to_string(),
                customer_name: "Acme Corp".to_string(),
                duration: Some("45:00".to_string()),
                date: Some("21 Jan 2026".to_string()),
            },
            participants: vec![Participant {
                name: "Alex Rivera".to_string(),
                role: Role::Prospect,
                title: Some("VP Engineering".to_string()),
                is_decision_maker: true,
            }],
        };

        let prompt = build_analysis_prompt("transcript body", Some(&context));
        assert!(prompt.contains("- Customer: Acme Corp"));
        assert!(prompt.contains("Alex Rivera"));
        assert!(prompt.contains("decision maker"));
    }
}
