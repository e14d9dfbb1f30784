use e2b_model::Reaction;
use e2b_model::codes::translate_reaction_outcome;

use crate::dom::XmlElement;

/// Extract every `<reaction>` found anywhere under a `<patient>` subtree, in
/// document order.
pub fn extract_reactions(patient: &XmlElement) -> Vec<Reaction> {
    patient
        .descendants("reaction")
        .into_iter()
        .map(extract_reaction)
        .collect()
}

fn extract_reaction(reaction: &XmlElement) -> Reaction {
    Reaction {
        // Reporter verbatim wins over the MedDRA-coded term when both exist.
        meddra_pt: reaction
            .text_of("primarysourcereaction")
            .or_else(|| reaction.text_of("reactionmeddrapt")),
        meddra_pt_code: reaction.text_of("reactionmeddraversionpt"),
        meddra_llt: reaction.text_of("reactionmeddrallt"),
        meddra_llt_code: reaction.text_of("reactionmeddraversionllt"),
        start_date: reaction.text_of("reactionstartdate"),
        end_date: reaction.text_of("reactionenddate"),
        duration: reaction.text_of("reactionduration"),
        outcome: translate_reaction_outcome(reaction.text_of("reactionoutcome")),
    }
}
