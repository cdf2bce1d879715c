//! Instruction templates for the five pipeline stages.
//!
//! The texts are Portuguese because the product is: the summaries come from
//! the Portuguese Wikipedia and the generated reading is shown to Brazilian
//! users. Substitution values are spliced in verbatim; downstream stages
//! receive upstream output exactly as the generation service produced it.

/// Stage 1: merge profile, summaries and artist record into one document
pub fn render_combine(
    user_json: &str,
    sign_summary: &str,
    team_summary: &str,
    city_summary: &str,
    artist_json: &str,
) -> String {
    format!(
        "Você é um oráculo poético. Recebeu as seguintes informações (texto bruto) \
         e deve produzir saídas intermediárias.\n\n\
         Usuário:\n{user_json}\n\n\
         Resumo - Signo:\n{sign_summary}\n\n\
         Resumo - Time:\n{team_summary}\n\n\
         Resumo - Cidade:\n{city_summary}\n\n\
         Info - Artista (Spotify):\n{artist_json}\n\n\
         Combine tudo num único documento coerente, mantendo citações das partes \
         originais (cite as fontes em linhas com 'Fonte: ...')."
    )
}

/// Stage 2: named-entity listing over the combined document
pub fn render_ner(combined_doc: &str) -> String {
    format!(
        "Extraia as ENTIDADES NOMEADAS do texto abaixo em formato JSON com chaves: \
         Pessoas, Locais, Organizações, Eventos, Outros. \
         Para cada entidade inclua: 'texto' e 'origem' (ex: Signo, Time, Cidade, \
         Artista, Usuário). \
         Se não houver itens para uma categoria, retorne lista vazia.\n\n\
         Texto:\n{combined_doc}\n\n\
         Saída JSON estrita (apenas JSON):"
    )
}

/// Stage 3: ranked key phrases over the combined document
pub fn render_keywords(combined_doc: &str) -> String {
    format!(
        "Extraia as 12 palavras-chave (ou frases curtas) mais relevantes do texto \
         abaixo. Retorne um JSON com chave 'keywords' que é uma lista ordenada da \
         mais relevante para a menos.\n\n\
         Texto:\n{combined_doc}\n\n\
         Saída JSON:"
    )
}

/// Stage 4: three invented classification labels with short rationales
pub fn render_classification(combined_doc: &str) -> String {
    format!(
        "Classifique o perfil em três categorias inventadas e criativas baseadas \
         no texto:\n\
         - personalidade_musical\n\
         - vibe_futebolistica\n\
         - polaridade_emocional\n\n\
         Dê também uma explicação curta (1-2 frases) para cada classificação. \
         Retorne JSON.\n\n\
         Texto:\n{combined_doc}\n\n\
         Saída JSON:"
    )
}

/// Stage 5: the final reading, fed with everything the earlier stages produced
pub fn render_prediction(
    combined_doc: &str,
    ner_json: &str,
    keywords_json: &str,
    classification_json: &str,
    user_json: &str,
) -> String {
    format!(
        "Você é o Oráculo Estocástico: gere uma PREVISÃO FINAL fictícia, mística, \
         humorística e poética para o usuário. \
         Use todas as informações a seguir: documento combinado, entidades \
         extraídas, palavras-chave e classificações. \
         A previsão deve:\n\
         - ser claramente sinalizada como IMAGINÁRIA e para entretenimento\n\
         - misturar referências reais (citadas com 'Fonte: ...') com elementos absurdos\n\
         - ter entre 6 e 12 linhas curtas\n\
         - terminar com uma 'dica prática' divertida (1 frase)\n\n\
         Forneça também um pequeno parágrafo (2-3 frases) explicando como a \
         previsão se relaciona às informações reais.\n\n\
         Document:\n{combined_doc}\n\n\
         Ner JSON:\n{ner_json}\n\n\
         Keywords JSON:\n{keywords_json}\n\n\
         Classificação JSON:\n{classification_json}\n\n\
         User:\n{user_json}\n\n\
         Saída JSON com chaves: prediction (string com quebras de linha), \
         explanation (string)."
    )
}
