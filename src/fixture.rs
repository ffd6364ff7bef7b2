//! in-memory stand-in for a real patent index

use lazy_static::lazy_static;

use crate::data::PatentRecord;

lazy_static! {
    static ref MOCK_PATENTS: Vec<PatentRecord> = vec![
        record(
            "1",
            "Machine Learning System for Image Recognition in Medical Diagnostics",
            "A novel machine learning system utilizing deep neural networks for automated image recognition in medical diagnostic applications. The system employs convolutional neural networks with attention mechanisms to analyze medical imagery including X-rays, MRIs, and CT scans with high accuracy.",
            "1. A computer-implemented method for analyzing medical images comprising: receiving a medical image input; processing the image through a trained convolutional neural network; generating diagnostic predictions based on learned patterns; and outputting confidence scores for identified conditions.",
            "The present invention relates to artificial intelligence systems for healthcare applications. Specifically, it describes a deep learning architecture optimized for medical image analysis that can detect abnormalities with accuracy comparable to trained radiologists.",
            "MedTech AI Corporation",
            "Dr. Sarah Chen, Dr. Michael Roberts",
            "2024-03-15",
        ),
        record(
            "2",
            "Natural Language Processing Engine for Patent Document Analysis",
            "An advanced NLP engine specifically designed for parsing and analyzing patent documents. The system uses transformer-based models to extract key claims, identify prior art references, and generate semantic embeddings for similarity matching across patent databases.",
            "1. A method for automated patent analysis comprising: tokenizing patent document text; applying domain-specific language models; extracting structured claim information; and computing similarity scores against existing patent corpus.",
            "This invention addresses the challenge of analyzing large patent portfolios efficiently. By leveraging state-of-the-art language models fine-tuned on patent-specific text, the system can automatically categorize patents, identify potential infringement risks, and discover related technologies.",
            "InnoSearch Technologies",
            "James Wilson, Emily Zhang",
            "2024-01-22",
        ),
        record(
            "3",
            "Quantum-Enhanced Optimization Algorithm for Drug Discovery",
            "A hybrid quantum-classical optimization algorithm designed to accelerate molecular simulation and drug discovery processes. The system leverages quantum annealing principles combined with classical machine learning to explore molecular configurations efficiently.",
            "1. A quantum computing method for molecular optimization comprising: encoding molecular structures into qubit representations; performing quantum annealing operations; and extracting optimal molecular configurations from measurement outcomes.",
            "The pharmaceutical industry faces significant computational challenges in drug discovery. This invention provides a quantum-enhanced approach that can evaluate molecular binding affinities and predict drug efficacy orders of magnitude faster than classical methods alone.",
            "QuantumPharma Inc.",
            "Dr. Alex Kumar, Dr. Lisa Park",
            "2024-02-08",
        ),
    ];
}

/// all fixture records, in their fixed order
pub fn mock_patents() -> &'static [PatentRecord] {
    &MOCK_PATENTS
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    abstract_text: &str,
    claims: &str,
    description: &str,
    assignee: &str,
    inventor: &str,
    application_date: &str,
    ) -> PatentRecord
{
    PatentRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        abstract_text: abstract_text.to_owned(),
        claims: claims.to_owned(),
        description: description.to_owned(),
        assignee: assignee.to_owned(),
        inventor: inventor.to_owned(),
        application_date: application_date.to_owned(),
    }
}
