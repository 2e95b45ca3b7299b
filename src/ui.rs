pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Coffee Retail Dashboard</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
  <style>
    :root {
      --bg-1: #f6f1e7;
      --bg-2: #e8d9c3;
      --ink: #2b2a28;
      --accent: #8c5a3c;
      --accent-2: #2f4858;
      --card: #ffffff;
      --muted: #8a8579;
      --shadow: 0 16px 40px rgba(47, 72, 88, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      font-family: "Segoe UI", system-ui, sans-serif;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
    }

    .wrap {
      max-width: 1180px;
      margin: 0 auto;
      padding: 28px 20px 60px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 20px;
    }

    header h1 { margin: 0; font-size: 1.6rem; letter-spacing: 0.02em; }

    #total-revenue {
      font-size: 1.3rem;
      font-weight: 600;
      color: var(--accent);
    }

    .filters { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 18px; }

    .filters button {
      border: 1px solid var(--accent-2);
      background: transparent;
      color: var(--accent-2);
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 0.85rem;
      cursor: pointer;
    }

    .filters button.active {
      background: var(--accent-2);
      color: #fff;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(12, 1fr);
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 16px 18px;
    }

    .card h2 {
      margin: 0 0 10px;
      font-size: 0.95rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .card .chart-box { position: relative; height: 260px; }

    .pies { grid-column: span 5; }
    .line { grid-column: span 7; }
    .heat { grid-column: span 5; }
    .table-card { grid-column: span 12; }

    @media (max-width: 900px) {
      .pies, .line, .heat, .table-card { grid-column: span 12; }
    }

    .pie-row { display: flex; gap: 12px; }
    .pie-row > div { flex: 1; text-align: center; }
    .pie-row canvas { max-height: 180px; }
    .pie-total { font-weight: 600; margin-top: 6px; }

    #heatmap { border-collapse: collapse; width: 100%; font-size: 0.7rem; }
    #heatmap td, #heatmap th { padding: 2px; text-align: center; }
    #heatmap td.cell {
      width: 18px;
      height: 18px;
      border-radius: 3px;
      background: #eee;
    }

    table.data { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
    table.data th, table.data td { padding: 8px 10px; text-align: right; }
    table.data th:first-child, table.data td:first-child { text-align: left; }
    table.data thead th {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      color: var(--muted);
      border-bottom: 2px solid var(--bg-2);
    }
    table.data tbody tr { border-bottom: 1px solid #f0ebe0; }
    tr.category-row { cursor: pointer; font-weight: 600; }
    tr.product-row td:first-child { padding-left: 28px; font-weight: 400; color: var(--muted); }
    tr.product-row { display: none; }
    tr.product-row.open { display: table-row; }

    .hidden { display: none; }
  </style>
</head>
<body>
  <div class="wrap">
    <header>
      <h1>Coffee Retail Dashboard</h1>
      <div id="total-revenue">Total Rev: $0</div>
    </header>

    <div class="filters" id="shop-filters">
      <button data-val="Overall" class="active">All Stores</button>
      <button data-val="Astoria">Astoria</button>
      <button data-val="Lower Manhattan">Lower Manhattan</button>
      <button data-val="Hell's Kitchen">Hell's Kitchen</button>
    </div>

    <div class="filters" id="month-filters">
      <button data-val="Overall" class="active">All Months</button>
      <button data-val="1">Jan</button>
      <button data-val="2">Feb</button>
      <button data-val="3">Mar</button>
      <button data-val="4">Apr</button>
      <button data-val="5">May</button>
      <button data-val="6">Jun</button>
    </div>

    <div class="grid">
      <div class="card pies" id="pie-card">
        <h2>Share by Store</h2>
        <div class="pie-row">
          <div>
            <canvas id="pieSales"></canvas>
            <div class="pie-total" id="pie-sales-total">$0</div>
          </div>
          <div>
            <canvas id="pieQty"></canvas>
            <div class="pie-total" id="pie-qty-total">0 Units</div>
          </div>
        </div>
      </div>

      <div class="card heat hidden" id="heatmap-card">
        <h2>Transaction Density</h2>
        <table id="heatmap"></table>
      </div>

      <div class="card line">
        <h2>
          Trend
          <label style="float:right; font-size:0.75rem; text-transform:none;">
            <input type="checkbox" id="toggle-qty" /> show quantity
          </label>
        </h2>
        <div class="chart-box"><canvas id="lineChart"></canvas></div>
      </div>

      <div class="card table-card">
        <h2>Category Breakdown</h2>
        <table class="data" id="main-table">
          <thead>
            <tr>
              <th>Category</th>
              <th>Sales</th>
              <th>% Sales</th>
              <th>Avg Price</th>
              <th>Qty</th>
              <th>% Qty</th>
            </tr>
          </thead>
          <tbody></tbody>
        </table>
      </div>
    </div>
  </div>

  <script>
    let currentShop = 'Overall';
    let currentMonth = 'Overall';
    let showQty = false;
    let lastLineData = null;

    let chartPieSales, chartPieQty, chartLine;

    const money = new Intl.NumberFormat('en-US', { style: 'currency', currency: 'USD' });
    const DAY_LABELS = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];
    const OPEN_HOUR = 6;
    const CLOSE_HOUR = 20;

    document.addEventListener('DOMContentLoaded', () => {
      initCharts();
      bindFilters('shop-filters', val => { currentShop = val; });
      bindFilters('month-filters', val => { currentMonth = val; });
      document.getElementById('toggle-qty').addEventListener('change', e => {
        showQty = e.target.checked;
        if (lastLineData) applyLine(lastLineData);
      });
      fetchData();
    });

    function bindFilters(id, assign) {
      const group = document.getElementById(id);
      group.querySelectorAll('button').forEach(btn => {
        btn.addEventListener('click', () => {
          group.querySelectorAll('button').forEach(b => b.classList.remove('active'));
          btn.classList.add('active');
          assign(btn.getAttribute('data-val'));
          fetchData();
        });
      });
    }

    function fetchData() {
      const url = `/api/dashboard_data?shop=${encodeURIComponent(currentShop)}&month=${encodeURIComponent(currentMonth)}`;
      fetch(url)
        .then(r => r.json())
        .then(data => {
          updateMetrics(data.metrics);
          updatePies(data.pie_data);
          updateHeatmap(data.heatmap_data);
          lastLineData = data.line_data;
          applyLine(data.line_data);
          updateTable(data.table_data);
        })
        .catch(err => console.error('dashboard fetch failed:', err));
    }

    function updateMetrics(m) {
      document.getElementById('total-revenue').innerText = 'Total Rev: ' + money.format(m.total_revenue);
    }

    function updatePies(data) {
      const card = document.getElementById('pie-card');
      if (!data.labels.length) {
        card.classList.add('hidden');
        return;
      }
      card.classList.remove('hidden');

      chartPieSales.data.labels = data.labels;
      chartPieSales.data.datasets[0].data = data.sales;
      chartPieSales.update();
      document.getElementById('pie-sales-total').innerText =
        money.format(data.sales.reduce((a, b) => a + b, 0));

      chartPieQty.data.labels = data.labels;
      chartPieQty.data.datasets[0].data = data.qty;
      chartPieQty.update();
      document.getElementById('pie-qty-total').innerText =
        data.qty.reduce((a, b) => a + b, 0).toLocaleString() + ' Units';
    }

    function updateHeatmap(data) {
      const card = document.getElementById('heatmap-card');
      const table = document.getElementById('heatmap');
      if (!data) {
        card.classList.add('hidden');
        table.innerHTML = '';
        return;
      }
      card.classList.remove('hidden');

      let html = '<tr><th></th>';
      for (let h = OPEN_HOUR; h <= CLOSE_HOUR; h++) html += `<th>${h}</th>`;
      html += '</tr>';

      for (let d = 0; d < 7; d++) {
        html += `<tr><th>${DAY_LABELS[d]}</th>`;
        for (let h = OPEN_HOUR; h <= CLOSE_HOUR; h++) {
          const count = data.transaction_matrix[`${d}:${h}`] || 0;
          const intensity = data.max_transactions > 0 ? count / data.max_transactions : 0;
          const bg = count > 0
            ? `rgba(140, 90, 60, ${0.15 + 0.85 * intensity})`
            : '#f1ede4';
          html += `<td class="cell" title="${count}" style="background:${bg}"></td>`;
        }
        html += '</tr>';
      }
      table.innerHTML = html;
    }

    function applyLine(data) {
      const datasets = showQty ? data.qty_datasets : data.sales_datasets;
      chartLine.data.labels = data.dates;
      chartLine.data.datasets = datasets.map(ds => ({
        ...ds,
        borderWidth: 2,
        pointRadius: 0,
        tension: 0.3,
        fill: false
      }));
      chartLine.update();
    }

    function updateTable(rows) {
      const tbody = document.querySelector('#main-table tbody');
      tbody.innerHTML = '';

      rows.forEach((row, i) => {
        const tr = document.createElement('tr');
        tr.className = 'category-row';
        tr.innerHTML = `
          <td>${row.category}</td>
          <td>${money.format(row.sales)}</td>
          <td>${row.percent_sales.toFixed(1)}%</td>
          <td>${money.format(row.avg_price)}</td>
          <td>${row.qty.toLocaleString()}</td>
          <td>${row.percent_qty.toFixed(1)}%</td>
        `;
        tr.addEventListener('click', () => {
          document.querySelectorAll(`tr.product-row[data-cat="${i}"]`)
            .forEach(p => p.classList.toggle('open'));
        });
        tbody.appendChild(tr);

        row.products.forEach(p => {
          const ptr = document.createElement('tr');
          ptr.className = 'product-row';
          ptr.setAttribute('data-cat', String(i));
          ptr.innerHTML = `
            <td>${p.name}</td>
            <td>${money.format(p.sales)}</td>
            <td>${p.percent_sales.toFixed(1)}%</td>
            <td>${money.format(p.avg_price)}</td>
            <td>${p.qty.toLocaleString()}</td>
            <td>${p.percent_qty.toFixed(1)}%</td>
          `;
          tbody.appendChild(ptr);
        });
      });
    }

    function initCharts() {
      const pieOpts = {
        responsive: true,
        maintainAspectRatio: false,
        cutout: '65%',
        plugins: { legend: { display: false } }
      };
      const pieColors = ['#2c3e50', '#e67e22', '#27ae60'];

      chartPieSales = new Chart(document.getElementById('pieSales'), {
        type: 'doughnut',
        data: { labels: [], datasets: [{ data: [], backgroundColor: pieColors, borderWidth: 0 }] },
        options: pieOpts
      });

      chartPieQty = new Chart(document.getElementById('pieQty'), {
        type: 'doughnut',
        data: { labels: [], datasets: [{ data: [], backgroundColor: pieColors, borderWidth: 0 }] },
        options: pieOpts
      });

      chartLine = new Chart(document.getElementById('lineChart'), {
        type: 'line',
        data: { labels: [], datasets: [] },
        options: {
          responsive: true,
          maintainAspectRatio: false,
          interaction: { mode: 'index', intersect: false },
          plugins: { legend: { position: 'top', labels: { boxWidth: 10 } } },
          scales: {
            x: { grid: { display: false } },
            y: { beginAtZero: true }
          }
        }
      });
    }
  </script>
</body>
</html>
"##;
