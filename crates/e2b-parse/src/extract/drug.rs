use e2b_model::Drug;
use e2b_model::codes::translate_drug_characterization;

use crate::dom::XmlElement;

/// Extract every `<drug>` found anywhere under a `<patient>` subtree, in
/// document order. Document order is therapeutic relevance order and becomes
/// the per-case sequence number at assembly.
pub fn extract_drugs(patient: &XmlElement) -> Vec<Drug> {
    patient
        .descendants("drug")
        .into_iter()
        .map(extract_drug)
        .collect()
}

fn extract_drug(drug: &XmlElement) -> Drug {
    Drug {
        characterization: translate_drug_characterization(drug.text_of("drugcharacterization")),
        medicinal_product: drug.text_of("medicinalproduct"),
        generic_name: drug.text_of("activesubstancename"),
        obtain_drug_country: drug.text_of("obtaindrugcountry"),
        batch_number: drug.text_of("drugbatchnumb"),
        authorization_number: drug.text_of("drugauthorizationnumb"),
        authorization_country: drug.text_of("drugauthorizationcountry"),
        authorization_holder: drug.text_of("drugauthorizationholder"),
        dosage_text: drug.text_of("drugstructuredosagenumb"),
        dosage_form: drug.text_of("drugdosageform"),
        route_of_admin: drug.text_of("drugadministrationroute"),
        indication: drug.text_of("drugindication"),
        start_date: drug.text_of("drugstartdate"),
        end_date: drug.text_of("drugenddate"),
        action_taken: drug.text_of("actiondrug"),
        recurrence: drug.text_of("drugrecurreadministration"),
    }
}
