pub(crate) const NOTES_NAME: &str = "notes.txt";

pub(crate) const NOTES: &str = "--- Learning Record for: {{ lesson_id }} ---

Date: {{ generated_at }}

====================
I. 5W1H Notes:
====================
{% for field in fields %}{{ field.name | upper }}: {{ field.value }}
{% endfor %}
====================
II. Short Answer Question:
====================
{% if short_answer.answer %}{{ short_answer.label }}: {{ short_answer.prompt }}
Your Answer: {{ short_answer.answer }}
{% else %}{{ short_answer.label }}: No short answer provided.
{% endif %}";

pub(crate) const WORD_BANK_NAME: &str = "word_bank.html";

pub(crate) const WORD_BANK: &str = r#"{% if words | length == 0 %}<p class="empty-state" style="text-align: center; margin-top: 30px; color: var(--light-text-color);">{{ empty_message }}</p>{% else %}{% for item in words %}
<div class="word-item">
    <input type="checkbox" id="word-{{ loop.index0 }}" class="mastery-toggle" data-word="{{ item.word }}"{% if item.mastered %} checked{% endif %}>
    <label for="word-{{ loop.index0 }}">
        <strong>{{ item.word }}</strong> ({{ item.part_of_speech }}) - {{ item.definition }}
        <span class="source">Source: {{ item.source }}</span>
        <p class="example-sentence example">{{ item.example }}</p>
    </label>
</div>{% endfor %}
{% endif %}"#;

pub(crate) const ERROR_REVIEW_NAME: &str = "error_review.html";

pub(crate) const ERROR_REVIEW: &str = r#"{% if errors | length == 0 %}<p class="empty-state" style="text-align: center; margin-top: 30px; color: var(--light-text-color);">{{ empty_message }}</p>{% else %}{% for item in errors %}
<div class="error-item">
    <h4>{{ item.source }}: {{ item.question }}</h4>
    <p class="user-answer">Your answer: {{ item.user_answer }}</p>
    <p class="correct-answer">Correct answer: {{ item.correct_answer }}</p>
    <p class="explanation">Recorded on: {{ item.recorded_on }}</p>
</div>{% endfor %}
{% endif %}"#;
