use ngo_crm_demo::{
    user_name, LegalCaseBook, NewCase, PendingAttachments, PickedFile, ReportCenter, ReportKind,
    TicketDesk, TicketForm, TicketPriority,
};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    println!("Starting helpdesk example");

    let mut desk = TicketDesk::seeded();
    let mut pending = PendingAttachments::new();
    pending.add(vec![
        PickedFile::new("screen.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]),
        PickedFile::new("router log.txt", "text/plain", b"link down".to_vec()),
    ]);
    let ticket = desk.submit(
        TicketForm {
            title: "Router keeps rebooting".to_string(),
            requester_id: "u2".to_string(),
            priority: TicketPriority::High,
            ..Default::default()
        },
        &mut pending,
    )?;
    println!("Filed {} with {} attachments", ticket.id, ticket.attachments.len());

    for ticket in desk.filtered(None, Some(TicketPriority::High)) {
        println!(
            "  {:<28} {:?} assigned to {}",
            ticket.title,
            ticket.status,
            user_name(ticket.assignee_id.as_deref())
        );
    }

    let mut cases = LegalCaseBook::seeded();
    cases.add(NewCase {
        title: "Donation receipt audit".to_string(),
        notes: "Requested by finance".to_string(),
        ..Default::default()
    });
    for case in cases.filtered("", None, None) {
        println!(
            "  {} {}",
            case.case_number.as_deref().unwrap_or("-"),
            case.title
        );
    }

    let mut reports = ReportCenter::new();
    let id = reports.generate(ReportKind::Budget, 2025, "All Global Operations");
    let report = reports.complete(id)?;
    println!("Report {} is {:?} as {:?}", report.id, report.status, report.format);

    println!("Helpdesk example completed");
    Ok(())
}
